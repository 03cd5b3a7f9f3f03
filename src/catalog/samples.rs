//! Static sample text tables.
//!
//! One incorrect/correct pair per language. The texts are deliberately
//! short: each incorrect sample shows a common style mistake and the
//! correct sample shows the cleaned-up version of the same code.

use super::{Language, SamplePair};

/// Placeholder pair used for plaintext and for unknown language ids.
pub const PLAINTEXT: SamplePair = SamplePair {
    incorrect: "Write anything here...",
    correct: "Write anything here...",
};

const CSHARP: SamplePair = SamplePair {
    incorrect: "// Bad Example\npublic class calculator\n{\n    public int a(int x, int y)\n    {\n        var r = x + y;\n        return r;\n    }\n}",
    correct: "// Good Example\npublic class Calculator\n{\n    public int Add(int firstNumber, int secondNumber)\n    {\n        return firstNumber + secondNumber;\n    }\n}",
};

const CPP: SamplePair = SamplePair {
    incorrect: "// Bad Example\nint calc(int a,int b){\nint res=a+b;\nreturn res;\n}",
    correct: "// Good Example\nint calculateSum(int firstNumber, int secondNumber) {\n    return firstNumber + secondNumber;\n}",
};

const C: SamplePair = SamplePair {
    incorrect: "// Bad Example\nint f(int x,int y){\nint z=x+y;\nreturn z;\n}",
    correct: "// Good Example\nint add_numbers(int first, int second) {\n    return first + second;\n}",
};

const JAVA: SamplePair = SamplePair {
    incorrect: "// Bad Example\npublic class calc {\n    public int a(int x, int y) {\n        int r = x + y;\n        return r;\n    }\n}",
    correct: "// Good Example\npublic class Calculator {\n    public int add(int firstNumber, int secondNumber) {\n        return firstNumber + secondNumber;\n    }\n}",
};

const PYTHON: SamplePair = SamplePair {
    incorrect: "# Bad Example\ndef f(x,y):\n    r=x+y\n    return r",
    correct: "# Good Example\ndef add_numbers(first_number, second_number):\n    return first_number + second_number",
};

const JAVASCRIPT: SamplePair = SamplePair {
    incorrect: "// Bad Example\nfunction f(x,y){\nvar r=x+y\nreturn r\n}",
    correct: "// Good Example\nfunction addNumbers(firstNumber, secondNumber) {\n    return firstNumber + secondNumber;\n}",
};

const TYPESCRIPT: SamplePair = SamplePair {
    incorrect: "// Bad Example\nfunction f(x:any,y:any){\nvar r=x+y\nreturn r\n}",
    correct: "// Good Example\nfunction addNumbers(firstNumber: number, secondNumber: number): number {\n    return firstNumber + secondNumber;\n}",
};

const GO: SamplePair = SamplePair {
    incorrect: "// Bad Example\nfunc f(x int,y int) int {\nr:=x+y\nreturn r\n}",
    correct: "// Good Example\nfunc AddNumbers(firstNumber, secondNumber int) int {\n    return firstNumber + secondNumber\n}",
};

const RUST: SamplePair = SamplePair {
    incorrect: "// Bad Example\nfn f(x:i32,y:i32)->i32{\nlet r=x+y;\nr\n}",
    correct: "// Good Example\nfn add_numbers(first_number: i32, second_number: i32) -> i32 {\n    first_number + second_number\n}",
};

const PHP: SamplePair = SamplePair {
    incorrect: "// Bad Example\nfunction f($x,$y){\n$r=$x+$y;\nreturn $r;\n}",
    correct: "// Good Example\nfunction addNumbers(int $firstNumber, int $secondNumber): int {\n    return $firstNumber + $secondNumber;\n}",
};

const RUBY: SamplePair = SamplePair {
    incorrect: "# Bad Example\ndef f(x,y)\nr=x+y\nreturn r\nend",
    correct: "# Good Example\ndef add_numbers(first_number, second_number)\n  first_number + second_number\nend",
};

const SWIFT: SamplePair = SamplePair {
    incorrect: "// Bad Example\nfunc f(x:Int,y:Int)->Int{\nlet r=x+y\nreturn r\n}",
    correct: "// Good Example\nfunc addNumbers(firstNumber: Int, secondNumber: Int) -> Int {\n    return firstNumber + secondNumber\n}",
};

const KOTLIN: SamplePair = SamplePair {
    incorrect: "// Bad Example\nfun f(x:Int,y:Int):Int{\nval r=x+y\nreturn r\n}",
    correct: "// Good Example\nfun addNumbers(firstNumber: Int, secondNumber: Int): Int {\n    return firstNumber + secondNumber\n}",
};

const SQL: SamplePair = SamplePair {
    incorrect: "-- Bad Example\nselect * from users where id=1",
    correct: "-- Good Example\nSELECT id, username, email\nFROM users\nWHERE id = 1;",
};

const HTML: SamplePair = SamplePair {
    incorrect: "<!-- Bad Example -->\n<div><p>hello</p><p>world</p></div>",
    correct: "<!-- Good Example -->\n<div>\n    <p>Hello</p>\n    <p>World</p>\n</div>",
};

const CSS: SamplePair = SamplePair {
    incorrect: "/* Bad Example */\n.btn{color:red;margin:10px;padding:5px;}",
    correct: "/* Good Example */\n.btn {\n    color: red;\n    margin: 10px;\n    padding: 5px;\n}",
};

const JSON: SamplePair = SamplePair {
    incorrect: "{\"name\":\"john\",\"age\":30,\"city\":\"NYC\"}",
    correct: "{\n    \"name\": \"John\",\n    \"age\": 30,\n    \"city\": \"NYC\"\n}",
};

const XML: SamplePair = SamplePair {
    incorrect: "<person><name>john</name><age>30</age></person>",
    correct: "<person>\n    <name>John</name>\n    <age>30</age>\n</person>",
};

const YAML: SamplePair = SamplePair {
    incorrect: "# Bad Example\nname: john\nage: 30\naddress: {city: NYC,zip: 10001}",
    correct: "# Good Example\nname: John\nage: 30\naddress:\n  city: NYC\n  zip: 10001",
};

const MARKDOWN: SamplePair = SamplePair {
    incorrect: "# title\nsome text\n- item1\n- item2",
    correct: "# Title\n\nSome descriptive text here.\n\n- Item 1\n- Item 2",
};

const SHELL: SamplePair = SamplePair {
    incorrect: "# Bad Example\nfor i in $(ls *.txt);do cat $i;done",
    correct: "# Good Example\nfor file in *.txt; do\n    cat \"$file\"\ndone",
};

const POWERSHELL: SamplePair = SamplePair {
    incorrect: "# Bad Example\n$a=Get-Process|where{$_.CPU -gt 100}",
    correct: "# Good Example\n$highCpuProcesses = Get-Process | Where-Object {\n    $_.CPU -gt 100\n}",
};

/// Total lookup from language to its sample pair.
pub(super) const fn lookup(lang: Language) -> &'static SamplePair {
    match lang {
        Language::Plaintext => &PLAINTEXT,
        Language::CSharp => &CSHARP,
        Language::Cpp => &CPP,
        Language::C => &C,
        Language::Java => &JAVA,
        Language::Python => &PYTHON,
        Language::JavaScript => &JAVASCRIPT,
        Language::TypeScript => &TYPESCRIPT,
        Language::Go => &GO,
        Language::Rust => &RUST,
        Language::Php => &PHP,
        Language::Ruby => &RUBY,
        Language::Swift => &SWIFT,
        Language::Kotlin => &KOTLIN,
        Language::Sql => &SQL,
        Language::Html => &HTML,
        Language::Css => &CSS,
        Language::Json => &JSON,
        Language::Xml => &XML,
        Language::Yaml => &YAML,
        Language::Markdown => &MARKDOWN,
        Language::Shell => &SHELL,
        Language::PowerShell => &POWERSHELL,
    }
}
