#[derive(Debug, Clone)]
pub struct ChartProfile {
    pub title: String,
    pub altered_label: String,
    pub unaltered_label: String,
    pub p_value_digits: usize,
}

impl ChartProfile {
    pub fn default_v1() -> Self {
        Self {
            title: "Overall Survival Kaplan-Meier Estimate".to_string(),
            altered_label: "Cases with Alteration(s) in Query Gene(s)".to_string(),
            unaltered_label: "Cases without Alteration(s) in Query Gene(s)".to_string(),
            p_value_digits: 3,
        }
    }

    pub fn with_title(title: Option<&str>) -> Self {
        let mut base = Self::default_v1();
        if let Some(title) = title {
            base.title = title.to_string();
        }
        base
    }
}
