pub mod event;
pub mod team_member;

pub use event::EventRepository;
pub use team_member::TeamMemberRepository;
