mod dispatch;
mod executor;
mod export;
mod helpers;
