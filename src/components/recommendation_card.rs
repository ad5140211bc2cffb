use leptos::prelude::*;

use crate::api::RecommendationItem;

/// Scores render with exactly three decimal places.
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

#[component]
pub fn RecommendationCard(
    item: RecommendationItem,
    #[prop(into)] on_feedback: Callback<bool>,
) -> impl IntoView {
    let salary = format!("{} – {}", item.salary_min, item.salary_max);
    let score = format_score(item.score);

    view! {
        <div class="recommendation-card">
            <div class="recommendation-title">
                {format!("{} @ {}", item.role, item.company)}
            </div>
            <div class="recommendation-detail">"Skills: " {item.required_skills.clone()}</div>
            <div class="recommendation-detail">"Salary: " {salary}</div>
            <div class="recommendation-detail">"Score: " {score}</div>
            <div class="recommendation-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| on_feedback.run(true)
                >
                    "Like"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_feedback.run(false)
                >
                    "Skip"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_renders_with_three_decimals() {
        assert_eq!(format_score(0.83333), "0.833");
        assert_eq!(format_score(1.0), "1.000");
        assert_eq!(format_score(0.0), "0.000");
    }

    #[test]
    fn score_rounds_at_the_third_decimal() {
        assert_eq!(format_score(2.0 / 3.0), "0.667");
    }
}
