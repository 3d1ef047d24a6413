// Ownership and Receiver-Qualifier Demonstrations
//
// Two small lessons sharing one library:
//
// - `timing`: does the receiver qualifier (`&self` vs `&mut self`) change
//   what an otherwise identical method costs at runtime?
// - `resource` + `scenarios`: how exclusive ownership (`Box`), shared
//   ownership (`Rc`), and non-owning borrows (`&T`) decide when a traced
//   resource is released.
//
// The binaries in `src/bin/` drive these; `trace` keeps the printed
// lifecycle events inspectable so the scenarios stay testable.

pub mod resource;
pub mod scenarios;
pub mod timing;
pub mod trace;
