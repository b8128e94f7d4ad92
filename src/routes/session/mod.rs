pub mod create;
pub mod delete;
pub mod invite;
pub mod invited;
pub mod join;
pub mod list;
pub mod mine;
pub mod show;
pub mod update;
