use std::path::Path;
use uaparser::{Parser, UserAgentParser};

pub struct UaParserEngine {
    parser: UserAgentParser,
}

impl UaParserEngine {
    /// Load a `regexes.yaml` from the ua-parser project.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(regexes_yaml: &[u8]) -> anyhow::Result<Self> {
        let parser = UserAgentParser::from_bytes(regexes_yaml)?;
        Ok(Self { parser })
    }

    pub fn os_family(&self, ua: &str) -> Option<String> {
        let os = self.parser.parse_os(ua);

        match &*os.family {
            "" | "Other" => None,
            family => Some(family.to_string()),
        }
    }
}
