use woothee::parser::Parser;

pub struct WootheeEngine {
    parser: Parser,
}

impl WootheeEngine {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn os_family(&self, ua: &str) -> Option<String> {
        let result = self.parser.parse(ua)?;

        // woothee reports versioned names ("Windows 10") and devices ("iPhone");
        // fold them into families.
        let family = match result.os {
            "" | "UNKNOWN" => return None,
            os if os.starts_with("Windows") => "Windows",
            "Mac OSX" => "Mac OS X",
            "iPhone" | "iPad" | "iPod" => "iOS",
            os => os,
        };

        Some(family.to_string())
    }
}
