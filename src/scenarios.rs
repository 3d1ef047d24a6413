// The three ownership scenarios of the lifetime demo.

use std::rc::Rc;

use crate::resource::Resource;

/// Exclusive ownership: exactly one owner at a time, transfer by move.
pub fn unique_ownership() {
    let res = create_unique();
    println!("[Caller] owns resource #{}", res.marker());

    consume_unique(res);
    // println!("{}", res.marker());  // Error! `res` was moved into the consumer
    println!("[Caller] binding was moved; the compiler rejects any further use");
}

fn create_unique() -> Box<Resource> {
    Box::new(Resource::new("unique_resource"))
}

fn consume_unique(res: Box<Resource>) {
    println!("[consume_unique] owns resource #{}", res.marker());
    res.touch();
} // res dropped here: the one and only release

/// Shared ownership: the resource lives until the last owner lets go.
pub fn shared_ownership() {
    let res = Rc::new(Resource::new("shared_resource"));
    println!(
        "[Owner A] resource #{}, owners = {}",
        res.marker(),
        Rc::strong_count(&res)
    );

    {
        let another = Rc::clone(&res);
        println!(
            "[Owner B] resource #{}, owners = {}",
            another.marker(),
            Rc::strong_count(&another)
        );
        another.touch();
    } // Owner B gone; resource still alive

    println!(
        "[Owner A] after inner scope, owners = {}",
        Rc::strong_count(&res)
    );
    res.touch();
} // last owner gone: release fires now

/// Non-owning observation: a borrow that cannot outlive the owner.
pub fn observer() {
    let owner = Box::new(Resource::new("observer_resource"));
    println!("[Owner] resource #{}", owner.marker());

    observe(&owner);
} // the owner's scope, and only the owner's scope, releases

fn observe(res: &Resource) {
    println!("[Observer] sees resource #{}", res.marker());
    res.touch();
} // nothing dropped here: observers never release
