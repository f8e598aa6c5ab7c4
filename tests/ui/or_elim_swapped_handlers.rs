//! Handlers that swap the disjuncts prove the commuted disjunction.

use conlogic::prop::Or;
use conlogic::rules::{or_elim, or_intro_left, or_intro_right};

fn main() {
    let elim = or_elim::<u8, char, Or<char, u8>>().apply(Or::Left(1));
    let swapped = elim.apply(or_intro_right::<char, u8>()).apply(or_intro_left::<char, u8>());
    let _same: Or<u8, char> = swapped;
}
