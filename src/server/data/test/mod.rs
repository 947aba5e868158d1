mod camp;
mod speaker;
mod talk;
mod user;
