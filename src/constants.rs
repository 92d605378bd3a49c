/// Prefix used when `COMMAND_PREFIX` is not set
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Speech language used when `TTS_LANGUAGE` is not set
pub const DEFAULT_TTS_LANGUAGE: &str = "en";

/// Google Translate speech endpoint
pub const GOOGLE_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Longest piece of text sent to the speech endpoint in one request
pub const TTS_CHUNK_CHARS: usize = 100;

/// Log directives for the application
pub const LOG_DIRECTIVES: [&str; 3] = ["speve=info", "serenity=warn", "songbird=warn"];

pub const PONG_REPLY: &str = "Pong! 🏓";
pub const PADDLE: &str = "🏓";
pub const RESTARTING_REPLY: &str = "Restarting...";
pub const NOT_CONNECTED_REPLY: &str = "You are not connected to a voice channel.";
pub const NEED_VOICE_CHANNEL: &str = "You need to be in a voice channel.";
pub const ALREADY_SPEAKING: &str = "Already speaking. Wait for the current message to finish.";
pub const SPEECH_FAILED: &str = "Failed to generate speech. Try again later.";
pub const BOT_NOT_IN_VOICE: &str = "I'm not in a voice channel.";
pub const OWNER_ONLY: &str = "This command is owner-only.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";
