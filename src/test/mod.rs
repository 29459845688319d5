mod aum;
mod cache;
