pub mod assignment;
pub mod coordinator;
pub mod criterion;
pub mod evaluation;
pub mod evaluator;
pub mod event;
pub mod participant;
pub mod submission;
pub mod user;

pub use assignment::{AssignmentResponse, AssignmentUi};
pub use coordinator::{CoordinatorResponse, CoordinatorUi};
pub use criterion::{CriterionResponse, CriterionUi};
pub use evaluation::{EvaluationResponse, EvaluationUi};
pub use evaluator::{EvaluatorResponse, EvaluatorUi};
pub use event::{EventResponse, EventUi};
pub use participant::{ParticipantResponse, ParticipantUi};
pub use submission::{SubmissionResponse, SubmissionUi};
pub use user::{UserResponse, UserUi};
