use crate::models::{
    AnalysisResult, DetectionModel, DetectionResult, DetectionResultList, DetectionStatus,
    ModelResult, Prediction, ResultPage,
};

/// Raw model status for models that did not apply to the media
const NOT_APPLICABLE: &str = "NOT_APPLICABLE";

/// Convert a 0-100 percentage to a 0-1 score
fn percentage_to_score(percentage: f64) -> f64 {
    (percentage / 100.0).clamp(0.0, 1.0)
}

fn normalize_model(model: &DetectionModel) -> ModelResult {
    // A structured prediction means the model did not evaluate, so there is no score
    let score = match model.prediction_number {
        Some(Prediction::Number(_)) => model.final_score.map(percentage_to_score),
        Some(Prediction::NotEvaluated(_)) | None => None,
    };

    ModelResult {
        name: model.name.clone(),
        status: DetectionStatus::from_raw(&model.status),
        score,
    }
}

/// Normalize one raw result into the canonical shape.
///
/// Status and score come from `resultsSummary`, falling back to the top-level
/// `overallStatus`/`finalScore`. Models with a `NOT_APPLICABLE` status are
/// dropped; the rest keep their order.
pub fn normalize_result(raw: &AnalysisResult) -> DetectionResult {
    let summary = raw.results_summary.as_ref();

    let status = summary
        .and_then(|s| s.status.as_deref())
        .or(raw.overall_status.as_deref())
        .map(DetectionStatus::from_raw)
        .unwrap_or(DetectionStatus::Analyzing);

    let score = summary
        .and_then(|s| s.metadata.as_ref())
        .and_then(|m| m.final_score)
        .or(raw.final_score)
        .map(percentage_to_score);

    let models = raw
        .models
        .iter()
        .filter(|model| model.status != NOT_APPLICABLE)
        .map(normalize_model)
        .collect();

    DetectionResult {
        request_id: raw.request_id.clone(),
        status,
        score,
        models,
    }
}

/// Normalize a raw page, copying pagination metadata verbatim
pub fn format_result_list(raw: &DetectionResultList) -> ResultPage {
    ResultPage {
        total_items: raw.total_items,
        total_pages: raw.total_pages,
        current_page: raw.current_page,
        current_page_items_count: raw.current_page_items_count,
        items: raw.items.iter().map(normalize_result).collect(),
    }
}
