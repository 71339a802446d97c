// ============================================
// Recommendation Core
// ============================================
//
// Three pure, side-effect-free stages:
// 1. Profile builder: raw LMS records -> LearnerProfile
// 2. Rule pipeline: LearnerProfile + catalog -> ranked recommendations
// 3. Contextual booster: wall-clock re-scoring over the generated list
//
// All I/O happens at the HTTP boundary before these run; given identical
// inputs (including the explicit timestamp for the booster) the output is
// identical on every invocation.

pub mod contextual;
pub mod profile;
pub mod recommend;

pub use contextual::ContextualBooster;
pub use profile::build_learner_profile;
pub use recommend::{find_next_unlocked_lesson, RecommendationEngine, MAX_RECOMMENDATIONS};
