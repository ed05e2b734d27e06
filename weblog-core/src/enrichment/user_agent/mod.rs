mod uaparser_engine;
mod woothee_engine;


use crate::conf::types::{UaEngineKind, UserAgentConfig};
use crate::enrichment::user_agent::uaparser_engine::UaParserEngine;
use crate::enrichment::user_agent::woothee_engine::WootheeEngine;
use anyhow::Context;

/// Bucket for agents neither engine recognizes.
pub const UNKNOWN_OS: &str = "Unknown";

pub fn build_os_classifier(config: &UserAgentConfig) -> anyhow::Result<OsClassifier> {
    match config.engine {
        UaEngineKind::Woothee => Ok(OsClassifier::Woothee(WootheeEngine::new())),
        UaEngineKind::UaParser => {
            let regexes = config
                .regexes
                .as_ref()
                .context("the uaparser engine needs a regexes file")?;
            let engine = UaParserEngine::from_file(regexes)
                .with_context(|| format!("failed to load {}", regexes.display()))?;
            Ok(OsClassifier::UaParser(engine))
        }
    }
}

/// Best-effort operating-system family detection for raw user-agent strings.
pub enum OsClassifier {
    UaParser(UaParserEngine),
    Woothee(WootheeEngine),
}

impl Default for OsClassifier {
    fn default() -> Self {
        OsClassifier::Woothee(WootheeEngine::new())
    }
}

impl OsClassifier {
    pub fn os_family(&self, ua: &str) -> String {
        let family = match self {
            OsClassifier::UaParser(p) => p.os_family(ua),
            OsClassifier::Woothee(p) => p.os_family(ua),
        };
        family.unwrap_or_else(|| UNKNOWN_OS.to_string())
    }
}
