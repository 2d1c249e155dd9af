mod announcement;
mod contact;
mod event;
mod faq;
mod location;
mod series;
mod user;
