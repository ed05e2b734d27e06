/// A well-formed combined log line; `n` varies the client address and path.
pub fn log_line(n: usize) -> String {
    format!(
        r#"10.0.{}.{} - - [01/Aug/2025:{:02}:15:00 +0000] "GET /page/{} HTTP/1.1" 200 {} "-" "agent-{}""#,
        n / 250,
        n % 250,
        n % 24,
        n,
        n * 10,
        n % 3
    )
}

pub fn log_file(lines: usize) -> String {
    (0..lines).map(|n| log_line(n) + "\n").collect()
}
