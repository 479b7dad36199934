pub mod category;
pub mod question;
pub mod quiz;

pub use category::{category_labels, Category};
pub use question::{NewQuestion, Number, Question, QuestionDraft};
pub use quiz::{QuizRequest, QuizResponse};
