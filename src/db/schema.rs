pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL,
    onboarding_complete INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS life_tasks (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    domain TEXT NOT NULL,
    custom_name TEXT NOT NULL,
    total_minutes INTEGER NOT NULL DEFAULT 0,
    phase TEXT NOT NULL DEFAULT 'apprentice',
    started_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS practice_sessions (
    id INTEGER PRIMARY KEY,
    life_task_id INTEGER NOT NULL REFERENCES life_tasks(id) ON DELETE CASCADE,
    date TEXT NOT NULL,
    duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
    quality INTEGER NOT NULL CHECK (quality BETWEEN 1 AND 5),
    session_type TEXT NOT NULL,
    notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY,
    life_task_id INTEGER NOT NULL REFERENCES life_tasks(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    deadline TEXT,
    is_completed INTEGER NOT NULL DEFAULT 0,
    completed_at TEXT,
    xp_reward INTEGER NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS mentors (
    id INTEGER PRIMARY KEY,
    life_task_id INTEGER NOT NULL REFERENCES life_tasks(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    domain TEXT NOT NULL DEFAULT '',
    is_historical INTEGER NOT NULL DEFAULT 0,
    notes TEXT NOT NULL DEFAULT '',
    relationship_level INTEGER NOT NULL DEFAULT 1 CHECK (relationship_level BETWEEN 1 AND 5),
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS mastery_progress (
    life_task_id INTEGER PRIMARY KEY REFERENCES life_tasks(id) ON DELETE CASCADE,
    focus INTEGER NOT NULL DEFAULT 0,
    discipline INTEGER NOT NULL DEFAULT 0,
    creativity INTEGER NOT NULL DEFAULT 0,
    intuition INTEGER NOT NULL DEFAULT 0,
    social_intelligence INTEGER NOT NULL DEFAULT 0,
    current_streak INTEGER NOT NULL DEFAULT 0,
    longest_streak INTEGER NOT NULL DEFAULT 0,
    total_xp INTEGER NOT NULL DEFAULT 0,
    unlocked_key_ids TEXT NOT NULL DEFAULT '[]'
);

CREATE INDEX IF NOT EXISTS idx_life_tasks_user ON life_tasks(user_id);
CREATE INDEX IF NOT EXISTS idx_sessions_life_task ON practice_sessions(life_task_id, date);
CREATE INDEX IF NOT EXISTS idx_projects_life_task ON projects(life_task_id);
CREATE INDEX IF NOT EXISTS idx_mentors_life_task ON mentors(life_task_id);
"#;

/// Tables created by [`SCHEMA`], in dependency order.
pub const TABLES: &[&str] = &[
    "users",
    "life_tasks",
    "practice_sessions",
    "projects",
    "mentors",
    "mastery_progress",
];
