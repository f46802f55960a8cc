use serde::Deserialize;

/// `?page=&size=` 查询参数
///
/// 以字符串接收，非法值不报错，按“未提供”处理。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub size: Option<String>,
}

/// 解析后的跳过/限制窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: Option<u64>,
}

impl PageWindow {
    /// 根据查询参数计算窗口
    ///
    /// - page 和 size 都能解析时才跳过 `page * size` 条（负数视为 0）
    /// - size 能解析且非 0 时限制为 `|size|` 条，0 表示不限制
    pub fn from_params(params: &PaginationParams) -> Self {
        let page = params.page.as_deref().and_then(parse_leading_int);
        let size = params.size.as_deref().and_then(parse_leading_int);

        let skip = match (page, size) {
            (Some(page), Some(size)) => page.saturating_mul(size).max(0) as u64,
            _ => 0,
        };
        let limit = size.filter(|s| *s != 0).map(i64::unsigned_abs);

        Self { skip, limit }
    }
}

// 解析开头的整数部分：" 12abc" -> 12，"2.5" -> 2，"abc" -> None
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|v| v * sign)
}
