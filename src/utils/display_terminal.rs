//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가
//! 조립 단계를 보여 줄 때 사용합니다. 로그가 아니라 표준 출력입니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 SERVICE REGISTRY                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let width = 50;
    let border = "═".repeat(width);

    format!("╔{border}╗\n║{title:^width$}║\n╚{border}╝")
}

/// `→ Step 1: Repositories`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: Repositories (5 components)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} components)", step, description, count);
}

/// `   ├─ UserRepository: OK`
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 조립 완료 요약
pub fn print_final_summary(repositories: usize, services: usize) {
    println!();
    print_boxed_title("SERVICE REGISTRY READY");
    println!("   📦 Repositories: {}", repositories);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repositories + services);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let boxed = boxed_title("READY");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].chars().count(), 52);
        assert!(lines[1].contains("READY"));
    }
}
