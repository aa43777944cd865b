mod caching;
mod loading;
mod queries;
