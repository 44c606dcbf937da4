use super::*;

fn member(code: &str) -> Option<Declaration> {
    DeclarationMatcher::new().member_declaration(code)
}

#[test]
fn matches_public_method() {
    let decl = member("    public void process(Order order) {").unwrap();
    assert_eq!(decl.name, "process");
    assert_eq!(decl.visibility, Visibility::Public);
    assert_eq!(decl.kind, DeclarationKind::Method);
}

#[test]
fn matches_all_visibilities() {
    assert_eq!(
        member("protected int size() {").unwrap().visibility,
        Visibility::Protected
    );
    assert_eq!(
        member("private static String name() {").unwrap().visibility,
        Visibility::Private
    );
    assert_eq!(
        member("void helper() {").unwrap().visibility,
        Visibility::Package
    );
}

#[test]
fn matches_generic_and_array_return_types() {
    assert_eq!(
        member("public static <T> List<T> listOf(T item) {").unwrap().name,
        "listOf"
    );
    assert_eq!(
        member("public Map<String, List<Integer>> index() {").unwrap().name,
        "index"
    );
    assert_eq!(member("public int[] values() {").unwrap().name, "values");
}

#[test]
fn matches_constructor_with_visibility() {
    let decl = member("public OrderService(Repository repo) {").unwrap();
    assert_eq!(decl.name, "OrderService");
    assert_eq!(decl.kind, DeclarationKind::Constructor);
}

#[test]
fn strips_same_line_annotations() {
    let decl = member("@Override public String toString() {").unwrap();
    assert_eq!(decl.name, "toString");
    assert_eq!(decl.visibility, Visibility::Public);
}

#[test]
fn rejects_control_flow_and_statements() {
    for code in [
        "if (ready) {",
        "for (int i = 0; i < n; i++) {",
        "while (running) {",
        "switch (kind) {",
        "} catch (IOException e) {",
        "catch (Exception e) {",
        "return compute(x);",
        "throw new IllegalStateException(msg);",
        "new Thread(task) {",
        "else if (x) {",
        "synchronized (lock) {",
        "int total = sum(values);",
        "process(order);",
        "this.repo = repo;",
        "super(name);",
        "String s = String.format(\"%d\", n);",
    ] {
        assert!(member(code).is_none(), "unexpected match for: {code}");
    }
}

#[test]
fn record_header_is_not_a_method() {
    assert!(member("public record Point(int x, int y) {").is_none());
}

#[test]
fn matches_type_declarations() {
    let matcher = DeclarationMatcher::new();
    for (code, name) in [
        ("public class Widget {", "Widget"),
        ("public final class Util {", "Util"),
        ("public interface Shape {", "Shape"),
        ("public enum Color {", "Color"),
        ("public record Point(int x, int y) {", "Point"),
        ("public @interface Marker {", "Marker"),
        ("public abstract sealed class Node permits Leaf {", "Node"),
    ] {
        let decl = matcher.type_declaration(code).unwrap();
        assert_eq!(decl.name, name);
        assert_eq!(decl.kind, DeclarationKind::Type);
        assert_eq!(decl.visibility, Visibility::Public);
    }
}

#[test]
fn declaration_prefers_type_shape() {
    let decl = DeclarationMatcher::new()
        .declaration("public record Pair(String a, String b) {")
        .unwrap();
    assert_eq!(decl.kind, DeclarationKind::Type);
}

#[test]
fn fields_are_not_declarations() {
    let matcher = DeclarationMatcher::new();
    assert!(matcher.declaration("public static final int MAX = 10;").is_none());
    assert!(matcher.declaration("private final Map<String, Integer> cache = new HashMap<>();").is_none());
}

#[test]
fn annotation_type_without_modifier_is_a_type() {
    let decl = DeclarationMatcher::new()
        .type_declaration("@interface Audited {")
        .unwrap();
    assert_eq!(decl.name, "Audited");
    assert_eq!(decl.visibility, Visibility::Package);
}

#[test]
fn strips_annotations_with_parens_in_string_arguments() {
    let decl = member(r##"@Cacheable(key = "#id.toString()") public Foo get(long id) {"##).unwrap();
    assert_eq!(decl.name, "get");
    assert_eq!(decl.visibility, Visibility::Public);
    assert_eq!(decl.kind, DeclarationKind::Method);
}

#[test]
fn strips_several_annotations_with_nested_arguments() {
    let decl = member(r#"@Timed(value = ")") @Retry(backoff = @Backoff(delay = 10)) protected void poll() {"#)
        .unwrap();
    assert_eq!(decl.name, "poll");
    assert_eq!(decl.visibility, Visibility::Protected);
}

#[test]
fn unterminated_annotation_is_not_a_declaration() {
    assert!(member("@SuppressWarnings({").is_none());
}
