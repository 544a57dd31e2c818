mod reducer;
mod store;
