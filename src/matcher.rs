/// 默认匹配阈值，欧氏距离严格小于该值才视为同一张人脸
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// 计算两个人脸向量的欧氏距离
///
/// 维数不一致时返回 `f64::MAX`，即视为必然不匹配，而不是报错
pub fn distance(va: &[f64], vb: &[f64]) -> f64 {
    if va.len() != vb.len() {
        return f64::MAX;
    }
    va.iter().zip(vb).map(|(a, b)| (a - b) * (a - b)).sum::<f64>().sqrt()
}

/// 判断距离是否在阈值之内，边界值不算匹配
#[inline(always)]
pub fn is_match(distance: f64, threshold: f64) -> bool {
    distance < threshold
}

/// 一次比对的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub distance: f64,
    pub matched: bool,
}

/// 匹配策略
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    pub threshold: f64,
}

impl MatchPolicy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// 比对待验证向量和已保存向量
    pub fn evaluate(&self, probe: &[f64], stored: &[f64]) -> MatchResult {
        let distance = distance(probe, stored);
        MatchResult { distance, matched: is_match(distance, self.threshold) }
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
