pub use fetch::*;
pub use history::*;
pub use locate::*;
pub use parse::*;
pub use summary::*;

mod fetch;
mod history;
mod locate;
mod parse;
mod summary;
