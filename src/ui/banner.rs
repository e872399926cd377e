// Fri Oct 16 2026 - Alex

use colored::*;

pub struct Banner {
    title: String,
    version: Option<String>,
    width: usize,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            version: None,
            width: 50,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn title_line(&self) -> String {
        match &self.version {
            Some(version) => format!("{} v{}", self.title, version),
            None => self.title.clone(),
        }
    }

    pub fn render(&self) -> String {
        format!("{}\n{}", self.title_line().cyan().bold(), "=".repeat(self.width).cyan())
    }

    pub fn print(&self) {
        println!("{}", self.render());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_line() {
        assert_eq!(Banner::new("Resolution Patcher").with_version("1.0.0").title_line(), "Resolution Patcher v1.0.0");
        assert_eq!(Banner::new("Resolution Patcher").title_line(), "Resolution Patcher");
    }

    #[test]
    fn test_render_has_rule() {
        let text = Banner::new("Resolution Patcher").render();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains(&"=".repeat(50)));
    }
}
