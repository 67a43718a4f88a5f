//! 컴포넌트 단위 로거
//!
//! `log` 파사드 위에서 target을 컴포넌트 이름으로 고정합니다.
//! 전역 인스턴스 없이 각 서비스 생성자에 주입합니다.
//!
//! ```bash
//! RUST_LOG=info,UserService=debug cargo run
//! ```

use std::fmt;
use log::Level;

#[derive(Debug, Clone)]
pub struct ComponentLogger {
    component: String,
}

impl ComponentLogger {
    pub fn new(component: impl Into<String>) -> Self {
        Self { component: component.into() }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: self.component.as_str(), level, "{}", args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }
}
