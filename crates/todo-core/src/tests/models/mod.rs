mod session;
mod todo;
