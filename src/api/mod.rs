pub mod dexscreener;
