/* src/cli/contract/src/tests/mod.rs */

pub(crate) mod fixture;
