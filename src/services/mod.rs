// Anechoic services
// Services wrap external collaborators: the companion chat backend process.

pub mod chat_service;
