/// Builder for one combined-format access-log line.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub ip: String,
    pub time: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub bytes: String,
    pub referrer: String,
    pub user_agent: String,
}

impl LogLine {
    pub fn new(ip: &str, time: &str, path: &str) -> Self {
        Self {
            ip: ip.to_string(),
            time: time.to_string(),
            method: "GET".to_string(),
            path: path.to_string(),
            status: 200,
            bytes: "512".to_string(),
            referrer: "-".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn bytes(mut self, bytes: &str) -> Self {
        self.bytes = bytes.to_string();
        self
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.user_agent = ua.to_string();
        self
    }

    pub fn render(&self) -> String {
        format!(
            r#"{} - - [{}] "{} {} HTTP/1.1" {} {} "{}" "{}""#,
            self.ip,
            self.time,
            self.method,
            self.path,
            self.status,
            self.bytes,
            self.referrer,
            self.user_agent
        )
    }
}

/// Newline-terminated log file contents.
pub fn access_log<'a>(lines: impl IntoIterator<Item = &'a LogLine>) -> String {
    lines.into_iter().map(|l| l.render() + "\n").collect()
}
