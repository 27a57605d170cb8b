mod landing;
pub use landing::Landing;

mod about;
pub use about::About;

mod legal;
pub use legal::{Privacy, Terms};

mod dashboard;
pub use dashboard::Dashboard;

mod find_doula;
pub use find_doula::FindDoula;

mod messages;
pub use messages::Messages;

mod activities;
pub use activities::Activities;

mod community;
pub use community::Community;

mod resources;
pub use resources::Resources;

mod profile;
pub use profile::Profile;

mod onboarding;
pub use onboarding::{
    BirthingCenterOnboarding, DoulaOnboarding, MotherOnboarding, OrganizationOnboarding,
};
