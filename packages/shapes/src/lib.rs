pub mod models;
pub mod normalizer;

pub use common::{EntityKind, Normalize, Patch, ShapeError};
pub use normalizer::{normalize_batch, normalize_value};

use utoipa::OpenApi;

use crate::models::*;

/// OpenAPI components for every record shape, for hosts that publish them.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Evaluation Event Record Shapes",
        version = "1.0.0",
        description = "Partial (Response) and complete (Ui) record shapes for evaluation events"
    ),
    components(schemas(
        EntityKind,
        UserResponse,
        UserUi,
        EventResponse,
        EventUi,
        ParticipantResponse,
        ParticipantUi,
        SubmissionResponse,
        SubmissionUi,
        EvaluatorResponse,
        EvaluatorUi,
        CoordinatorResponse,
        CoordinatorUi,
        CriterionResponse,
        CriterionUi,
        EvaluationResponse,
        EvaluationUi,
        AssignmentResponse,
        AssignmentUi,
    ))
)]
pub struct ShapesDoc;
