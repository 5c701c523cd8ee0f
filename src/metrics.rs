use std::sync::LazyLock;

use prometheus::*;

static METRIC_REGISTER_COUNT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!("face_register_count", "count of face registrations", &["result"])
        .unwrap()
});

static METRIC_VERIFY_COUNT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!("face_verify_count", "count of face verifications", &["result"])
        .unwrap()
});

static METRIC_VERIFY_DISTANCE: LazyLock<Histogram> = LazyLock::new(|| {
    register_histogram!(
        "face_verify_distance",
        "euclidean distance between the probe and the stored face vector",
        (1..=20).map(|x| x as f64 * 0.1).collect()
    )
    .unwrap()
});

/// 一次请求的结果分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    NotFound,
    Error,
}

impl Outcome {
    fn as_label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }
}

pub fn inc_register_count(outcome: Outcome) {
    METRIC_REGISTER_COUNT.with_label_values(&[outcome.as_label()]).inc();
}

pub fn inc_verify_count(outcome: Outcome) {
    METRIC_VERIFY_COUNT.with_label_values(&[outcome.as_label()]).inc();
}

/// 记录比对距离，维数不一致时的哨兵值不计入
pub fn observe_verify_distance(distance: f64) {
    if distance < f64::MAX {
        METRIC_VERIFY_DISTANCE.observe(distance);
    }
}
