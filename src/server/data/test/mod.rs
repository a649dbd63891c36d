mod document;
mod flag;
mod notification;
mod organization;
mod user;
mod workspace;
