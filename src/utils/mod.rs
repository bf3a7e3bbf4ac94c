pub mod url_validator;

/// 随机生成由字母和数字组成的短链路径
pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    let chars = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// 去掉首尾空格，再去掉首尾的 `/`
pub fn normalize_path(value: &str) -> &str {
    value.trim_matches(' ').trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_code() {
        let code = generate_random_code(16);
        assert_eq!(code.len(), 16);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(generate_random_code(0).is_empty());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("  /abc/ "), "abc");
        assert_eq!(normalize_path("//a/b//"), "a/b");
        assert_eq!(normalize_path("https://example.com/"), "https://example.com");
        assert_eq!(normalize_path(" / "), "");
        // 只裁剪空格，制表符保留
        assert_eq!(normalize_path("\tabc"), "\tabc");
    }
}
