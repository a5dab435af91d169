//! Intensity-to-tone mapping and the instruction sent to the model.

pub const MIN_INTENSITY: i64 = 1;
pub const MAX_INTENSITY: i64 = 10;
pub const DEFAULT_TONE: &str = "热情、鼓励";

const TONES: [&str; 10] = [
    "非常温和、轻柔",
    "温和、平静",
    "友善、温暖",
    "积极、正面",
    "热情、鼓励",
    "充满活力、激励",
    "非常热情、振奋",
    "激动、兴奋",
    "极其热情、狂热",
    "超级激动、爆发式",
];

/// Tone for an intensity level. Anything outside 1..=10 gets [`DEFAULT_TONE`].
pub fn tone_for(level: i64) -> &'static str {
    if (MIN_INTENSITY..=MAX_INTENSITY).contains(&level) {
        TONES[(level - MIN_INTENSITY) as usize]
    } else {
        DEFAULT_TONE
    }
}

/// Tone for a raw JSON number. Integral floats such as `8.0` count as `8`.
pub fn tone_for_number(intensity: &serde_json::Number) -> &'static str {
    let level = intensity.as_i64().or_else(|| {
        intensity
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    });

    level.map(tone_for).unwrap_or(DEFAULT_TONE)
}

/// All defined levels with their tones, lowest first.
pub fn levels() -> Vec<(i64, &'static str)> {
    (MIN_INTENSITY..=MAX_INTENSITY)
        .map(|level| (level, tone_for(level)))
        .collect()
}

pub fn build_prompt(situation: &str, tone: &str) -> String {
    format!(
        "你是一个非常善于夸奖和鼓励孩子的专家。请根据以下情况，生成5条{tone}的夸奖话语来鼓励孩子。

情况描述：{situation}

要求：
1. 语气要{tone}
2. 要真诚、具体，避免空洞的夸奖
3. 要能让孩子感受到被理解和支持
4. 每条回复都要不同的角度和重点
5. 适合中国家长对孩子说的话
6. 每条回复控制在50字以内

请直接返回5条夸奖话语，用换行符分隔，不要添加序号或其他格式。"
    )
}
