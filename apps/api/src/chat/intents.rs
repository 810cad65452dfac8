//! Intent classifiers: keyword predicates over the lowercased question.
//!
//! Predicates overlap on purpose (a "backend strengths" question also mentions
//! "backend"); which one wins is decided by the route table order in `router.rs`,
//! never inside a predicate.

/// Question categories that get a deterministic answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Age,
    Contact,
    WhyHire,
    Intro,
    ProjectsPitch,
    BackendStrengths,
    FrontendStrengths,
    SkillsAndProjects,
    SoftSkills,
    Technology,
    Backend,
    Project,
    GitHub,
}

impl Intent {
    /// Source label reported as `model` in the chat response.
    pub fn source_label(&self) -> &'static str {
        match self {
            Intent::Age => "deterministic-age-parser",
            Intent::Contact => "deterministic-contact-parser",
            Intent::WhyHire => "deterministic-why-hire-parser",
            Intent::Intro => "deterministic-intro-parser",
            Intent::ProjectsPitch => "deterministic-project-pitch-parser",
            Intent::BackendStrengths => "deterministic-backend-strength-parser",
            Intent::FrontendStrengths => "deterministic-frontend-strength-parser",
            Intent::SkillsAndProjects => "deterministic-skill-project-parser",
            Intent::SoftSkills => "deterministic-softskills-parser",
            Intent::Technology => "deterministic-skill-parser",
            Intent::Backend => "deterministic-backend-parser",
            Intent::Project => "deterministic-project-parser",
            Intent::GitHub => "deterministic-github-parser",
        }
    }
}

fn contains_any(q: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| q.contains(t))
}

pub fn is_age_question(question: &str) -> bool {
    let q = question.to_lowercase();
    q.contains("age") || q.contains("how old")
}

pub fn is_contact_question(question: &str) -> bool {
    let q = question.to_lowercase();
    contains_any(
        &q,
        &["contact", "email", "phone", "mobile", "linkedin", "linked in"],
    )
}

pub fn is_why_hire_question(question: &str) -> bool {
    let q = question.to_lowercase();
    q.contains("why hire") || q.contains("why should we hire")
}

pub fn is_intro_question(question: &str) -> bool {
    let q = question.to_lowercase();
    contains_any(
        &q,
        &[
            "tell me about yourself",
            "introduce yourself",
            "60 second intro",
            "self introduction",
        ],
    )
}

pub fn is_projects_pitch_question(question: &str) -> bool {
    let q = question.to_lowercase();
    (q.contains("projects") && q.contains("30"))
        || q.contains("projects in 30 sec")
        || q.contains("project pitch")
}

pub fn is_backend_strengths_question(question: &str) -> bool {
    let q = question.to_lowercase();
    q.contains("backend strengths") || (q.contains("backend") && q.contains("strength"))
}

pub fn is_frontend_strengths_question(question: &str) -> bool {
    let q = question.to_lowercase();
    q.contains("frontend strengths") || (q.contains("frontend") && q.contains("strength"))
}

pub fn is_skills_projects_question(question: &str) -> bool {
    let q = question.to_lowercase();
    let has_skills = contains_any(&q, &["technical skills", "skills", "tech stack", "languages"]);
    let has_projects = contains_any(&q, &["major projects", "projects", "project name"]);
    has_skills && has_projects
}

pub fn is_softskills_question(question: &str) -> bool {
    let q = question.to_lowercase();
    contains_any(
        &q,
        &[
            "communication",
            "leadership",
            "soft skills",
            "team collaboration",
            "time management",
            "critical thinking",
            "adaptability",
        ],
    )
}

pub fn is_technology_question(question: &str) -> bool {
    let q = question.to_lowercase();
    if contains_any(&q, &["technology", "technologies", "tech stack"]) {
        return true;
    }
    if q.contains("strongest") && contains_any(&q, &["tech", "technology", "technologies"]) {
        return true;
    }
    // technical-skill intent only, soft skills are handled earlier
    contains_any(
        &q,
        &[
            "technical skills",
            "frameworks",
            "languages",
            "tools",
            "frontend stack",
            "backend stack",
        ],
    )
}

/// Needs a backend term AND an intent term: "what does API mean" is not a backend question.
pub fn is_backend_question(question: &str) -> bool {
    let q = question.to_lowercase();
    let backend_terms = ["backend", "rest api", "api", "node.js", "express", "postgresql"];
    let intent_terms = ["what kind", "experience", "work", "done", "built"];
    contains_any(&q, &backend_terms) && contains_any(&q, &intent_terms)
}

pub fn is_project_question(question: &str) -> bool {
    let q = question.to_lowercase();
    q.contains("project")
        && contains_any(
            &q,
            &[
                "made", "build", "built", "created", "which", "what", "give", "name", "list",
            ],
        )
}

pub fn is_github_question(question: &str) -> bool {
    let q = question.to_lowercase();
    let has_github = q.contains("github") || q.contains("git hub");
    has_github && contains_any(&q, &["url", "link", "profile", "id", "give"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_matches_substring() {
        assert!(is_age_question("How old are you?"));
        assert!(is_age_question("What is your AGE"));
        // substring containment, same as every other predicate
        assert!(is_age_question("Tell me about your background stage"));
        assert!(!is_age_question("Where do you study?"));
    }

    #[test]
    fn test_contact_terms() {
        assert!(is_contact_question("What's your email?"));
        assert!(is_contact_question("Share your Linked In"));
        assert!(!is_contact_question("Where are you based?"));
    }

    #[test]
    fn test_why_hire() {
        assert!(is_why_hire_question("Why should we hire you?"));
        assert!(is_why_hire_question("why hire sunay"));
        assert!(!is_why_hire_question("why would anyone hire you"));
    }

    #[test]
    fn test_intro() {
        assert!(is_intro_question("Tell me about yourself"));
        assert!(is_intro_question("Give a 60 second intro"));
        assert!(!is_intro_question("Tell me about your projects"));
    }

    #[test]
    fn test_projects_pitch() {
        assert!(is_projects_pitch_question("Explain your projects in 30 seconds"));
        assert!(is_projects_pitch_question("Give me a project pitch"));
        assert!(!is_projects_pitch_question("List your projects"));
    }

    #[test]
    fn test_strengths() {
        assert!(is_backend_strengths_question("What are your backend strengths"));
        assert!(is_backend_strengths_question("strength in backend?"));
        assert!(is_frontend_strengths_question("Frontend strengths please"));
        assert!(!is_frontend_strengths_question("Frontend experience"));
    }

    #[test]
    fn test_skills_and_projects_needs_both() {
        assert!(is_skills_projects_question("Technical skills and major projects?"));
        assert!(is_skills_projects_question("List languages and projects"));
        assert!(!is_skills_projects_question("What are your skills?"));
        assert!(!is_skills_projects_question("What projects?"));
    }

    #[test]
    fn test_softskills() {
        assert!(is_softskills_question("How is your communication?"));
        assert!(is_softskills_question("Leadership examples?"));
        assert!(!is_softskills_question("What tools do you use?"));
    }

    #[test]
    fn test_technology() {
        assert!(is_technology_question("What technologies are you strongest in?"));
        assert!(is_technology_question("What is your tech stack"));
        assert!(is_technology_question("strongest tech?"));
        assert!(is_technology_question("Which frameworks do you know"));
        assert!(!is_technology_question("Where did you study?"));
    }

    #[test]
    fn test_backend_requires_intent_term() {
        assert!(is_backend_question("What backend work have you done?"));
        assert!(is_backend_question("Do you have REST API experience"));
        assert!(!is_backend_question("What does API mean"));
        assert!(!is_backend_question("backend"));
    }

    #[test]
    fn test_project() {
        assert!(is_project_question("Which projects have you built?"));
        assert!(is_project_question("name a project"));
        assert!(!is_project_question("Tell me about project"));
    }

    #[test]
    fn test_github() {
        assert!(is_github_question("Give me your GitHub"));
        assert!(is_github_question("git hub profile link"));
        assert!(!is_github_question("Do you use github?"));
    }

    #[test]
    fn test_source_labels_unique() {
        let all = [
            Intent::Age,
            Intent::Contact,
            Intent::WhyHire,
            Intent::Intro,
            Intent::ProjectsPitch,
            Intent::BackendStrengths,
            Intent::FrontendStrengths,
            Intent::SkillsAndProjects,
            Intent::SoftSkills,
            Intent::Technology,
            Intent::Backend,
            Intent::Project,
            Intent::GitHub,
        ];
        let labels: std::collections::HashSet<_> = all.iter().map(|i| i.source_label()).collect();
        assert_eq!(labels.len(), all.len());
    }
}
