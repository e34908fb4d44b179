//! Static description of the restored KotaPal project tree.
//!
//! Every table in this module is a literal transcription of the legacy
//! flat-directory cleanup: which directories must exist, which loosely-named
//! root files belong where, and the filenames involved in the index-page
//! swap. The lists are ordered; the restoration walks them top to bottom.

/// Destination directories created up front, ancestors first.
pub const DIRECTORIES: &[&str] = &[
    "docs",
    "data",
    "archive",
    "archive/KotaPal simple",
    "archive/KotaPal simple/images",
    "archive/KotaPal simple/GitLab SSH Key",
    "archive/KotaPal simple/kotapal-20",
    "frontend",
    "frontend/src",
    "frontend/public",
    "src",
];

/// Documentation files collected into `docs/` under their own names.
pub const DOC_FILES: &[&str] = &[
    "AI_ASSISTANT_ADDED.md",
    "AI_ASSISTANT_SETUP.md",
    "AI_INTEGRATION_SUMMARY.md",
    "CODE_FIXED.md",
    "DATABASE_COMPARISON.md",
    "DATABASE_QUICK_START.md",
    "DEBUG_INSTRUCTIONS.md",
    "DEBUG_LOGIN_ISSUE.md",
    "DOWNLOAD_FIREBASE_KEY.md",
    "FINAL_INSTRUCTIONS.md",
    "FINAL_LOGIN_FIX.md",
    "FINAL_WORKING_SOLUTION.md",
    "FIREBASE_CLIENT_SETUP.md",
    "FIREBASE_CONFIGURED.md",
    "FIREBASE_INTEGRATION_COMPLETE.md",
    "FIREBASE_NOW_WORKING.md",
    "FIREBASE_SETUP.md",
    "FIREBASE_STEP_BY_STEP_GUIDE.md",
    "FIX_FIREBASE_KEY.md",
    "FIX_LOGIN_ERROR.md",
    "FIXED_API_CONNECTION.md",
    "GOOGLE_AUTH_SETUP.md",
    "HOW_TO_LOGIN.md",
    "LOGIN_CREDENTIALS_FIX.md",
    "LOGIN_FIX.md",
    "LOGIN_FIXED.md",
    "NETLIFY_DEPLOYMENT.md",
    "OPEN_HTML_FILE.md",
    "PROJECT_SUMMARY.md",
    "QUICK_START.md",
    "README.md",
    "README_GOOGLE_LOGIN.md",
    "START_HERE.md",
    "START_WITH_FIREBASE.md",
    "STORAGE_EXPLANATION.md",
    "SUPABASE_SETUP.md",
    "TEST_AUTH.md",
    "TEST_BACKEND.md",
    "TEST_DATABASE.md",
    "TEST_LOGIN_NOW.md",
    "TROUBLESHOOTING.md",
    "WORKING_SOLUTION.md",
];

/// Launcher scripts and one-off test pages collected into `archive/`.
pub const ARCHIVE_FILES: &[&str] = &[
    "CHECK_FIREBASE_SETUP.bat",
    "FINAL_START.bat",
    "LAUNCH_FRONTEND.bat",
    "OPEN_LANDING_PAGE.bat",
    "RUN_APP.bat",
    "RUN_EVERYTHING.bat",
    "run-backend.bat",
    "run-frontend.bat",
    "SERVER_STATUS.bat",
    "SIMPLE_START.bat",
    "start-backend.bat",
    "start-both.bat",
    "start-frontend.bat",
    "start-server.bat",
    "start.bat",
    "START_BACKEND.bat",
    "START_BOTH.bat",
    "START_FRONTEND.bat",
    "START_NOW.bat",
    "START_SERVER.bat",
    "START_SERVERS.bat",
    "test-login-signup-verification.html",
];

/// Backend source files collected into `src/` under their own names.
pub const BACKEND_FILES: &[&str] = &[
    "affiliate-apis.js",
    "ai-service.js",
    "analytics.js",
    "auth-service.js",
    "db.js",
    "embed-generator.js",
    "firebase-config.js",
    "store.js",
    "supabase-config.js",
];

/// Individually mapped files: `(root filename, destination path)`.
///
/// Unlike the lists above, these do not keep their names under a single
/// destination directory; each entry names its full target explicitly.
pub const ASSET_MOVES: &[(&str, &str)] = &[
    ("data.json", "data/data.json"),
    ("IMG_4258.JPG", "archive/KotaPal simple/images/IMG_4258.JPG"),
    ("IMG_4258.png", "archive/KotaPal simple/images/IMG_4258.png"),
    ("SSH_KEY.txt", "archive/KotaPal simple/GitLab SSH Key/SSH.txt"),
    ("kotapal-20.txt", "archive/KotaPal simple/kotapal-20/kotapal-20.txt"),
    ("_redirects", "frontend/public/_redirects"),
    ("FRONTEND_package.json", "frontend/package.json"),
    ("postcss.config.js", "frontend/postcss.config.js"),
    ("tailwind.config.js", "frontend/tailwind.config.js"),
    ("FRONTEND_PUBLIC_index.html", "frontend/public/index.html"),
];

/// The React build entry point that takes over as the root index page.
pub const REACT_INDEX: &str = "react-app-index.html";

/// The root index page being replaced.
pub const ROOT_INDEX: &str = "index.html";

/// Temporary name holding the original index page mid-swap.
pub const ARCHIVED_INDEX_TEMP: &str = "KOTAPAL_index.html.original";

/// Final archived name of the original index page.
pub const ARCHIVED_INDEX: &str = "KOTAPAL_index.html";
