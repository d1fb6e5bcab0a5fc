/// Service settings with `development` overlays at the root and inside
/// `[postgres]`; `production` has no overlay table and reads base values.
pub const SERVICE_CONFIG: &str = r#"
user = "master user"
password = "master password"
max_connection = 100
show_slow_query = false
addresses = ["10.0.0.1", "10.0.0.2", "10.0.0.3"]

[postgres]
user = "rouser"
password = "mypassword"
tables = ["users", "password"]

[postgres.development]
user = "root"
password = ""
tables = ["users", "password", "debuglog"]

[development]
password = "12345"
max_connection = 1
show_slow_query = true
addresses = ["192.168.0.1", "192.168.0.2"]
"#;

/// One key of every scalar kind, with small root-level overlays.
pub const EXAMPLE_SCALARS: &str = r#"
int1 = 1
int2 = 1
int3 = 1
int4 = 1
int5 = 1
int6 = 1
int7 = 1
int8 = 1
int9 = 1
float1 = 0.1
float2 = 0.1
string1 = "string 1"
bool1 = true
date1 = 1980-01-01T00:00:00Z
array1 = [1, 2, 3]
array2 = [1, 2, 3]

[development]
int1 = 2

[production]
float1 = 0.5
array1 = [4, 5]
"#;

/// Nested table with a partial overlay per environment.
pub const EXAMPLE_OVERRIDES: &str = r#"
[user]
name = "user1"
age = 10

[user.development]
name = "user2"

[user.production]
name = "user3"
age = 20
"#;

/// The canonical TOML example document.
pub const EXAMPLE_TOML_CANONICAL: &str = r#"
# This is a TOML document. Boom.

title = "TOML Example"

[owner]
name = "Lance Uppercut"
dob = 1979-05-27T07:32:00-08:00 # First class dates? Why not?

[database]
server = "192.168.1.1"
ports = [ 8001, 8001, 8002 ]
connection_max = 5000
enabled = true

[servers]

  # You can indent as you please. Tabs or spaces. TOML don't care.
  [servers.alpha]
  ip = "10.0.0.1"
  dc = "eqdc10"

  [servers.beta]
  ip = "10.0.0.2"
  dc = "eqdc10"

[clients]
data = [ ["gamma", "delta"], [1, 2] ]

# Line breaks are OK when inside arrays
hosts = [
  "alpha",
  "omega"
]
"#;
