//! PHP sets. Beginner and intermediate exercises must reproduce the reference
//! solution (modulo case and layout); advanced ones are judged structurally.

use super::{DEFAULT_POINTS, ExerciseSpec, KindSpec};
use crate::predicate::CheckSpec;

pub(super) const BEGINNER: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Basic Output",
        description: "Printing text with echo",
        instructions: "Write PHP code to display a greeting message",
        hints: &[
            "Use the echo statement to output text",
            "Remember to start with <?php tag",
            "End statements with a semicolon",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
// Write your PHP code here to print a greeting

?>"#,
            solution: r#"<?php
echo "Hello, World!";
?>"#,
        },
    },
    ExerciseSpec {
        title: "Variables",
        description: "Declaring variables and concatenating strings",
        instructions: "Create and use variables in PHP",
        hints: &[
            "Variables in PHP start with $",
            "You can use single or double quotes for strings",
            "Use the dot (.) operator to concatenate strings",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
// Create name and age variables
$name = "";
$age = ;

// Print your message here

?>"#,
            solution: r#"<?php
$name = "John";
$age = 25;
echo "My name is " . $name . " and I am " . $age . " years old.";
?>"#,
        },
    },
    ExerciseSpec {
        title: "Math Operations",
        description: "Arithmetic operators",
        instructions: "Perform basic arithmetic operations",
        hints: &[
            "Use basic operators: +, -, *, /",
            "Store results in variables",
            "Remember to convert numbers to strings for output",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
$num1 = 10;
$num2 = 5;

// Calculate and display the sum, difference,
// product, and quotient of these numbers

?>"#,
            solution: r#"<?php
$num1 = 10;
$num2 = 5;
echo "Sum: " . ($num1 + $num2) . "\n";
echo "Difference: " . ($num1 - $num2) . "\n";
echo "Product: " . ($num1 * $num2) . "\n";
echo "Quotient: " . ($num1 / $num2);
?>"#,
        },
    },
    ExerciseSpec {
        title: "Conditionals",
        description: "Branching with if, elseif and else",
        instructions: "Use if-else statements to check conditions",
        hints: &[
            "Use if, elseif, and else statements",
            "Remember comparison operators: >, <, >=, <=, ==",
            "Curly braces {} are required for multi-line blocks",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
$score = 85;

// Write code to check the grade:
// 90 or above: print "Grade: A"
// 80-89: print "Grade: B"
// Below 80: print "Grade: C"

?>"#,
            solution: r#"<?php
$score = 85;
if ($score >= 90) {
    echo "Grade: A";
} elseif ($score >= 80) {
    echo "Grade: B";
} else {
    echo "Grade: C";
}
?>"#,
        },
    },
    ExerciseSpec {
        title: "Loops",
        description: "Counting with a for loop",
        instructions: "Create a loop to display numbers",
        hints: &[
            "For loops have 3 parts: initialization, condition, increment",
            "Use $i++ to increment the counter",
            "Add \\n for new lines in the output",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
// Use a for loop to print numbers 1 to 5
// Format: "Number: 1" (and so on)

?>"#,
            solution: r#"<?php
for ($i = 1; $i <= 5; $i++) {
    echo "Number: " . $i . "\n";
}
?>"#,
        },
    },
];

pub(super) const INTERMEDIATE: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Working with Arrays",
        description: "Create and manipulate PHP arrays",
        instructions: "Create an array and loop through it",
        hints: &[
            "Use array() or [] to create arrays",
            "Use foreach to loop through array elements",
            "Access array elements with $array[$index]",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
// Create an array of fruits
$fruits = array("Apple", "Banana", "Orange");

// Loop through and print each fruit

?>"#,
            solution: r#"<?php
$fruits = array("Apple", "Banana", "Orange");
foreach ($fruits as $fruit) {
    echo $fruit . "\n";
}
?>"#,
        },
    },
    ExerciseSpec {
        title: "Functions",
        description: "Write and call PHP functions",
        instructions: "Create a function that calculates the sum of two numbers",
        hints: &[
            "Use function keyword to define functions",
            "Functions take parameters inside parentheses",
            "Use return to return a value from function",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
// Define a function that adds two numbers
function add($a, $b) {
    // Your code here
}

// Call the function with values 5 and 3 and print result

?>"#,
            solution: r#"<?php
function add($a, $b) {
    return $a + $b;
}
echo add(5, 3);
?>"#,
        },
    },
    ExerciseSpec {
        title: "String Methods",
        description: "Use PHP string functions",
        instructions: "Use string functions to manipulate text",
        hints: &[
            "strlen() returns the length of a string",
            "strtoupper() converts to uppercase",
            "substr() extracts part of a string",
            "str_replace() replaces text",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
$text = "Hello World";

// Print the length of the string
// Print the string in uppercase
// Print first 5 characters
// Replace "World" with "PHP"

?>"#,
            solution: r#"<?php
$text = "Hello World";
echo strlen($text) . "\n";
echo strtoupper($text) . "\n";
echo substr($text, 0, 5) . "\n";
echo str_replace("World", "PHP", $text);
?>"#,
        },
    },
    ExerciseSpec {
        title: "Associative Arrays",
        description: "Work with key-value pairs in arrays",
        instructions: "Create and access an associative array",
        hints: &[
            "Associative arrays use keys => values",
            "Access values using $array['key']",
            "Use foreach with key and value: foreach ($arr as $key => $value)",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::ExactMatch {
            starter: r#"<?php
// Create an associative array for a person
$person = array(
    "name" => "John",
    "age" => 25,
    "city" => "New York"
);

// Print the person's name and age

?>"#,
            solution: r#"<?php
$person = array(
    "name" => "John",
    "age" => 25,
    "city" => "New York"
);
echo "Name: " . $person["name"] . "\n";
echo "Age: " . $person["age"];
?>"#,
        },
    },
];

pub(super) const ADVANCED: &[ExerciseSpec] = &[
    ExerciseSpec {
        title: "Object-Oriented Programming",
        description: "Create classes and implement OOP concepts in PHP",
        instructions: "Create a BlogPost class with properties and methods, implement \
                       inheritance with a Comment class, and use an interface and an \
                       abstract class",
        hints: &[
            "Initialise properties in __construct()",
            "Use extends and call parent::__construct()",
            "An abstract class can implement an interface",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<?php
// Task 1: Create a BlogPost class
class BlogPost {
    // Add properties and methods here
}

// Task 2: Implement inheritance with Comment class
class Comment {
    // Your code here
}

// Task 3: Create interface and abstract class
interface Publishable {
    // Your code here
}

abstract class Content {
    // Your code here
}
?>"#,
            solution: r#"<?php
class BlogPost {
    private $title;
    private $content;
    private $author;

    public function __construct($title, $content, $author) {
        $this->title = $title;
        $this->content = $content;
        $this->author = $author;
    }

    public function display() {
        echo "Title: " . $this->title . "\n";
        echo "Content: " . $this->content . "\n";
        echo "Author: " . $this->author;
    }
}

class Comment extends BlogPost {
    private $commentText;

    public function __construct($title, $content, $author, $commentText) {
        parent::__construct($title, $content, $author);
        $this->commentText = $commentText;
    }
}

interface Publishable {
    public function publish();
}

abstract class Content implements Publishable {
    abstract public function publish();
}
?>"#,
            checks: &[
                CheckSpec::new("constructor", &[r"function\s+__construct\s*\("]),
                CheckSpec::new(
                    "Comment extends BlogPost",
                    &[r"class\s+comment\s+extends\s+blogpost"],
                ),
                CheckSpec::new(
                    "Publishable interface method",
                    &[r"interface\s+publishable\s*\{\s*public\s+function\s+\w+"],
                ),
                CheckSpec::new(
                    "abstract Content implementing Publishable",
                    &[r"abstract\s+class\s+content\s+implements\s+publishable"],
                ),
            ],
        },
    },
    ExerciseSpec {
        title: "Database Operations",
        description: "Work with MySQL databases using PHP PDO",
        instructions: "Create a database connection class, implement insert and select, \
                       and use prepared statements",
        hints: &[
            "Connect with new PDO(\"mysql:host=...;dbname=...\", $user, $pass)",
            "Build placeholders with array_fill()",
            "Call prepare() then execute() with the values",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<?php
// Create a Database class
class Database {
    private $connection;

    public function __construct($host, $db, $user, $pass) {
        // Your connection code here
    }

    public function insert($table, $data) {
        // Your insert code here
    }

    public function select($table) {
        // Your select code here
    }
}
?>"#,
            solution: r#"<?php
class Database {
    private $connection;

    public function __construct($host, $db, $user, $pass) {
        try {
            $this->connection = new PDO(
                "mysql:host=$host;dbname=$db",
                $user,
                $pass
            );
        } catch (PDOException $e) {
            echo "Connection failed: " . $e->getMessage();
        }
    }

    public function insert($table, $data) {
        $keys = implode(", ", array_keys($data));
        $placeholders = implode(", ", array_fill(0, count($data), "?"));
        $query = "INSERT INTO $table ($keys) VALUES ($placeholders)";
        $stmt = $this->connection->prepare($query);
        return $stmt->execute(array_values($data));
    }

    public function select($table) {
        $query = "SELECT * FROM $table";
        return $this->connection->query($query)->fetchAll();
    }
}
?>"#,
            checks: &[
                CheckSpec::new("PDO connection", &[r"new\s+pdo\s*\("]),
                CheckSpec::new("prepared statement", &[r"->\s*prepare\s*\("]),
                CheckSpec::new("statement execution", &[r"->\s*execute\s*\("]),
                CheckSpec::new("select query", &[r"select\s+\*\s+from"]),
            ],
        },
    },
    ExerciseSpec {
        title: "RESTful API Development",
        description: "Build a simple REST API with PHP",
        instructions: "Handle GET, POST, PUT and DELETE, answer in JSON, and reject \
                       other methods",
        hints: &[
            "Read the body with file_get_contents('php://input')",
            "Encode responses with json_encode()",
            "Answer unknown methods with http_response_code(405)",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<?php
header('Content-Type: application/json');

$method = $_SERVER['REQUEST_METHOD'];

// Handle different HTTP methods
switch ($method) {
    case 'GET':
        // Your GET code here
        break;
    case 'POST':
        // Your POST code here
        break;
    case 'PUT':
        // Your PUT code here
        break;
    case 'DELETE':
        // Your DELETE code here
        break;
}
?>"#,
            solution: r#"<?php
header('Content-Type: application/json');

$method = $_SERVER['REQUEST_METHOD'];
$path = parse_url($_SERVER['REQUEST_URI'], PHP_URL_PATH);

switch ($method) {
    case 'GET':
        echo json_encode(['status' => 'success', 'data' => []]);
        break;
    case 'POST':
        $data = json_decode(file_get_contents('php://input'), true);
        echo json_encode(['status' => 'created', 'data' => $data]);
        break;
    case 'PUT':
        echo json_encode(['status' => 'updated']);
        break;
    case 'DELETE':
        echo json_encode(['status' => 'deleted']);
        break;
    default:
        http_response_code(405);
        echo json_encode(['error' => 'Method not allowed']);
}
?>"#,
            checks: &[
                CheckSpec::new("JSON responses", &[r"json_encode\s*\("]),
                CheckSpec::new(
                    "request body decoding",
                    &[r#"json_decode\s*\(\s*file_get_contents\s*\(\s*['"]php://input"#],
                ),
                CheckSpec::new(
                    "405 for other methods",
                    &[r"default\s*:[^}]*http_response_code\s*\(\s*405\s*\)"],
                ),
            ],
        },
    },
    ExerciseSpec {
        title: "Authentication System",
        description: "Implement secure user authentication",
        instructions: "Hash passwords on registration, verify them on login, and sign \
                       a JWT",
        hints: &[
            "password_hash() with PASSWORD_BCRYPT",
            "password_verify() compares against the stored hash",
            "Sign header.payload with hash_hmac('sha256', ...)",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<?php
class Auth {
    public function register($username, $password) {
        // Your registration code here
    }

    public function login($username, $password) {
        // Your login code here
    }

    public function generateJWT($username) {
        // Your JWT generation code here
    }
}
?>"#,
            solution: r#"<?php
class Auth {
    public function register($username, $password) {
        $hashedPassword = password_hash($password, PASSWORD_BCRYPT);
        // Store in database
        return true;
    }

    public function login($username, $password) {
        // Retrieve user from database
        $stored = 'hashed_password';
        if (password_verify($password, $stored)) {
            return true;
        }
        return false;
    }

    public function generateJWT($username) {
        $header = base64_encode(json_encode(['alg' => 'HS256', 'typ' => 'JWT']));
        $payload = base64_encode(json_encode(['username' => $username]));
        $signature = hash_hmac('sha256', $header . '.' . $payload, 'secret');
        return $header . '.' . $payload . '.' . $signature;
    }
}
?>"#,
            checks: &[
                CheckSpec::new("password hashing", &[r"password_hash\s*\("]),
                CheckSpec::new("password verification", &[r"password_verify\s*\("]),
                CheckSpec::new(
                    "HMAC signature",
                    &[r#"hash_hmac\s*\(\s*['"]sha256['"]"#],
                ),
            ],
        },
    },
    ExerciseSpec {
        title: "Advanced File Handling",
        description: "Work with file uploads and processing",
        instructions: "Validate uploads, process images, and move uploaded files",
        hints: &[
            "Check the extension against an allow-list with in_array()",
            "Reject files whose size exceeds a limit",
            "Use move_uploaded_file() to store the upload",
        ],
        points: DEFAULT_POINTS,
        kind: KindSpec::Coding {
            starter: r#"<?php
class FileHandler {
    public function validateUpload($file) {
        // Your validation code here
    }

    public function processImage($source) {
        // Your image processing code here
    }

    public function moveUploadedFile($file, $destination) {
        // Your file move code here
    }
}
?>"#,
            solution: r#"<?php
class FileHandler {
    public function validateUpload($file) {
        $allowed = ['jpg', 'png', 'gif'];
        $fileExt = strtolower(pathinfo($file['name'], PATHINFO_EXTENSION));

        if (!in_array($fileExt, $allowed)) {
            return false;
        }
        if ($file['size'] > 5000000) {
            return false;
        }
        return true;
    }

    public function processImage($source) {
        if (extension_loaded('gd')) {
            $image = imagecreatefromjpeg($source);
            // Process image
            return true;
        }
        return false;
    }

    public function moveUploadedFile($file, $destination) {
        return move_uploaded_file($file['tmp_name'], $destination);
    }
}
?>"#,
            checks: &[
                CheckSpec::new("extension allow-list", &[r"in_array\s*\("]),
                CheckSpec::new("size limit", &[r#"\[\s*['"]size['"]\s*\]\s*>"#]),
                CheckSpec::new("move_uploaded_file()", &[r"move_uploaded_file\s*\("]),
            ],
        },
    },
];
