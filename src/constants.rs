// User-facing notification texts - single source of truth for wording
pub const MSG_LOGIN_REQUIRED: &str = "Please log in to perform this action.";
pub const MSG_EMPTY_COMMENT: &str = "Please enter a comment before posting.";
pub const MSG_INVALID_PARTICIPANTS: &str = "Please enter a valid number of participants.";
pub const MSG_COMMENT_POSTED: &str = "Comment posted successfully!";
pub const MSG_REQUEST_FAILED: &str = "An error occurred while processing your request.";
pub const MSG_COMMENT_FAILED: &str = "An error occurred while posting your comment.";
pub const MSG_BOOKING_FAILED: &str = "An error occurred while processing your booking.";

// CSRF plumbing expected by the server
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

// Notification timings (milliseconds)
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;
pub const NOTIFICATION_DISPLAY_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

// Visual state classes toggled on like / bookmark buttons
pub const CLASS_LIKED: &str = "text-red-500";
pub const CLASS_BOOKMARKED: &str = "text-yellow-500";
pub const CLASS_INACTIVE: &str = "text-gray-400";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_OFFSCREEN: &str = "translate-x-full";
