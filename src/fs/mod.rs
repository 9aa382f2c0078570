//! SD card access.
//!
//! The only thing the robot writes to the SD card is its log. See [`logger`].

/// Console and `bigbot.log` logger.
pub mod logger;
