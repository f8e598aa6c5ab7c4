//! The left projection of `True ∧ u8` proves `True`, not `u8`.

use conlogic::prop::{And, True};
use conlogic::rules::and_elim_left;

fn main() {
    let both = And::new(True, 7_u8);
    let _right: u8 = and_elim_left::<True, u8>().apply(both);
}
