mod contests;
mod dashboard;
mod layout;
mod problems;
mod profile;

pub use contests::Contests;
pub use dashboard::Dashboard;
pub use layout::OrganizerLayout;
pub use problems::Problems;
pub use profile::Profile;
