// Curated answers that do not depend on resume content.
// Kept word-for-word; edit here when the pitch changes.

/// Name used by every answer that speaks about the candidate in the third person.
pub const CANDIDATE_NAME: &str = "Sunay";

pub const WHY_HIRE: &str = "\
Why hire Sunay:
- Strong combination of DSA discipline (C++) and real product execution.
- Builds and deploys full-stack projects, not just local demos.
- Works across frontend, backend, and AI-oriented product features.
- Ownership mindset: learns fast, iterates quickly, and delivers end-to-end.
- Startup-oriented thinking with focus on usable, scalable outcomes.";

pub const INTRO: &str = "I’m Sunay Revad, a B.Tech ICT student at DA-IICT (2022-2026), based in Ahmedabad, Gujarat. \
I focus on building AI-driven full-stack products and I pair that with strong DSA practice in C++. \
My flagship project is AI Finance Platform, and I’ve also built a movie recommendation system, a full-stack blog platform, \
and an AI deterministic UI generator. I enjoy taking ideas from concept to deployed product, and I’m currently aiming for \
frontend/full-stack opportunities where I can contribute quickly and keep scaling my backend and AI skills.";

pub const PROJECTS_PITCH: &str = "\
Sunay’s projects in 30 seconds:
- AI Finance Platform (flagship): AI-driven finance product with full-stack architecture.
- Movie Recommendation System: personalized recommendations using similarity modeling.
- Blog Platform: authentication-based content platform with dynamic publishing.
- AI Deterministic UI Generator: schema-constrained UI generation pipeline with versioning and rollback.
- Dataset Selection using ML: practical feature-selection and ML experimentation.";

pub const BACKEND_STRENGTHS: &str = "\
Sunay's backend strengths:
- Node.js and Express.js fundamentals with RESTful API development.
- Authentication flow design and integration.
- Database work with MySQL and PostgreSQL.
- Clean API integration mindset from full-stack project delivery.
- Strong debugging and iterative improvement approach.";

pub const FRONTEND_STRENGTHS: &str = "\
Sunay's frontend strengths:
- React.js and Next.js based product development.
- Responsive UI implementation with clean component structure.
- Tailwind CSS and shadcn/ui for fast, consistent interfaces.
- Strong attention to usability, dashboard-style UX, and interaction clarity.
- Experience shipping polished frontend on Vercel.";

pub const SOFT_SKILLS: &str = "\
Sunay's communication and leadership profile:
- Communicates with honesty and clarity, especially when explaining real project work.
- Shows leadership through ownership, consistency, and a builder mindset.
- Works well independently and is open to feedback in collaborative settings.
- Learns fast and keeps improving articulation with practice.
- If a topic is new, he handles it with a growth mindset: he can learn it quickly and do better in the next iteration.";
