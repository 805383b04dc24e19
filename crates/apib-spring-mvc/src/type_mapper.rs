/// Java reserved words that cannot be used as identifiers.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// Map a model type name to a Java type usable in declarations.
///
/// Type arguments cannot be primitives, so `List<int>` becomes `List<Integer>`.
/// A top-level primitive is kept as is.
pub fn java_type(type_name: &str) -> String {
    let Some(open) = type_name.find('<') else {
        return type_name.to_string();
    };

    let (base, args) = type_name.split_at(open);
    let mut result = String::with_capacity(type_name.len());
    result.push_str(base);

    let mut token = String::new();
    for ch in args.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '.' {
            token.push(ch);
        } else {
            result.push_str(boxed(&token));
            token.clear();
            result.push(ch);
        }
    }
    result.push_str(boxed(&token));
    result
}

fn boxed(token: &str) -> &str {
    match token {
        "int" => "Integer",
        "double" => "Double",
        "boolean" => "Boolean",
        "float" => "Float",
        "long" => "Long",
        "char" => "Character",
        "byte" => "Byte",
        "short" => "Short",
        other => other,
    }
}

/// Escape an identifier that collides with a Java keyword.
pub fn java_identifier(name: &str) -> String {
    if JAVA_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Escape a value for use inside a Java string literal.
pub fn java_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
