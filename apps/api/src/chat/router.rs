//! Answer router: walks the route table and answers from the first matching intent.

use tracing::debug;

use crate::chat::answers;
use crate::chat::intents::{self, Intent};
use crate::models::chat::Answer;

/// One entry of the route table.
pub struct Route {
    pub intent: Intent,
    pub matches: fn(&str) -> bool,
    pub build: fn(&str) -> String,
}

/// Evaluated top to bottom, first match wins.
///
/// Predicates overlap, so this order is the behavior: "what are your backend
/// strengths" must hit `BackendStrengths` before `Backend` gets a look.
pub const ROUTES: &[Route] = &[
    Route {
        intent: Intent::Age,
        matches: intents::is_age_question,
        build: answers::build_age_answer,
    },
    Route {
        intent: Intent::Contact,
        matches: intents::is_contact_question,
        build: answers::build_contact_answer,
    },
    Route {
        intent: Intent::WhyHire,
        matches: intents::is_why_hire_question,
        build: answers::build_why_hire_answer,
    },
    Route {
        intent: Intent::Intro,
        matches: intents::is_intro_question,
        build: answers::build_intro_answer,
    },
    Route {
        intent: Intent::ProjectsPitch,
        matches: intents::is_projects_pitch_question,
        build: answers::build_projects_pitch_answer,
    },
    Route {
        intent: Intent::BackendStrengths,
        matches: intents::is_backend_strengths_question,
        build: answers::build_backend_strengths_answer,
    },
    Route {
        intent: Intent::FrontendStrengths,
        matches: intents::is_frontend_strengths_question,
        build: answers::build_frontend_strengths_answer,
    },
    Route {
        intent: Intent::SkillsAndProjects,
        matches: intents::is_skills_projects_question,
        build: answers::build_skills_projects_answer,
    },
    Route {
        intent: Intent::SoftSkills,
        matches: intents::is_softskills_question,
        build: answers::build_softskills_answer,
    },
    Route {
        intent: Intent::Technology,
        matches: intents::is_technology_question,
        build: answers::build_technology_answer,
    },
    Route {
        intent: Intent::Backend,
        matches: intents::is_backend_question,
        build: answers::build_backend_answer,
    },
    Route {
        intent: Intent::Project,
        matches: intents::is_project_question,
        build: answers::build_projects_answer,
    },
    Route {
        intent: Intent::GitHub,
        matches: intents::is_github_question,
        build: answers::build_github_answer,
    },
];

/// Returns the first route whose predicate accepts the question.
pub fn classify(question: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| (route.matches)(question))
}

/// Answers deterministically, or `None` when the question needs the LLM.
pub fn route(question: &str, resume_text: &str) -> Option<Answer> {
    let route = classify(question)?;
    debug!("Question routed to {:?}", route.intent);
    Some(Answer::new(
        (route.build)(resume_text),
        route.intent.source_label(),
    ))
}
