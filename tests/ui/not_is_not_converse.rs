//! A disproof of `u8` is not an explosion into `u8`.

use conlogic::prop::Not;
use conlogic::rules::principle_of_explosion;

fn main() {
    let _disproof: Not<u8> = principle_of_explosion::<u8>();
}
