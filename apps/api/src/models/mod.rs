pub mod profession;
pub mod question;

pub use profession::Profession;
pub use question::{Question, QuestionPrompt};
