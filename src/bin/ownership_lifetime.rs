// Walks three ownership models over the same traced resource: exclusive
// (Box), shared (Rc), and a non-owning borrow.

use colored::Colorize;

use ownership_demos::scenarios;

fn main() {
    println!("{}", "=== Exclusive Ownership ===".bold());
    scenarios::unique_ownership();

    println!();
    println!("{}", "=== Shared Ownership ===".bold());
    scenarios::shared_ownership();

    println!();
    println!("{}", "=== Observer ===".bold());
    scenarios::observer();

    println!();
    println!("{}", "=== End of Program ===".bold());
}
