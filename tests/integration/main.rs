
mod assignments;
mod store_failures;
mod submissions;
mod system;
