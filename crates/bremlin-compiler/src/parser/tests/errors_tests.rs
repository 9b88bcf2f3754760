use crate::test_utils::expect_error;

#[test]
fn missing_start() {
    let res = expect_error("HasType[A].Eval");

    insta::assert_snapshot!(res, @"Envelope: command must begin with `Start[iri].`, got `HasType[A].Eval`");
}

#[test]
fn start_with_other_argument() {
    let res = expect_error("Start[node].Eval");

    insta::assert_snapshot!(res, @"Envelope: command must begin with `Start[iri].`, got `Start[node].Eval`");
}

#[test]
fn missing_eval() {
    let res = expect_error("Start[iri].HasType[A]");

    insta::assert_snapshot!(res, @"Envelope: command must end with `.Eval`, got `Start[iri].HasType[A]`");
}

#[test]
fn eval_glued_to_step() {
    let res = expect_error("Start[iri].HasType[A]Eval");

    insta::assert_snapshot!(res, @"Envelope: command must end with `.Eval`, got `Start[iri].HasType[A]Eval`");
}

#[test]
fn start_inside_body() {
    let res = expect_error("Start[iri].Start[iri].Eval");

    insta::assert_snapshot!(res, @"Envelope: `Start` may only appear in the command envelope, got `Start[iri]`");
}

#[test]
fn eval_inside_body() {
    let res = expect_error("Start[iri].Eval.HasType[A].Eval");

    insta::assert_snapshot!(res, @"Envelope: `Eval` may only appear in the command envelope, got `Eval`");
}

#[test]
fn unknown_keyword() {
    let res = expect_error("Start[iri].HasColour[red].Eval");

    insta::assert_snapshot!(res, @"UnknownKeyword: unknown step `HasColour` in `HasColour[red]`");
}

#[test]
fn keywords_are_case_sensitive() {
    let res = expect_error("Start[iri].hastype[A].Eval");

    insta::assert_snapshot!(res, @"UnknownKeyword: unknown step `hastype` in `hastype[A]`");
}

#[test]
fn missing_argument_list() {
    let res = expect_error("Start[iri].IsActive.Eval");

    insta::assert_snapshot!(res, @"Delimiter: expected `IsActive[...]`, got `IsActive`");
}

#[test]
fn unquoted_decimal_splits_the_step() {
    let res = expect_error("Start[iri].HasValue[field, 3.14].Eval");

    insta::assert_snapshot!(res, @"Delimiter: unterminated argument list, expected `]` in `HasValue[field,3`");
}

#[test]
fn text_after_argument_list() {
    let res = expect_error("Start[iri].HasType[A]B.Eval");

    insta::assert_snapshot!(res, @"Delimiter: unexpected `B` after `HasType[A]`");
}

#[test]
fn unterminated_or_group() {
    let res = expect_error("Start[iri].Or(HasType[A].HasType[B].Eval");

    insta::assert_snapshot!(res, @"Delimiter: unterminated `Or(` group, expected `)` in `Or(HasType[A].HasType[B]`");
}

#[test]
fn unterminated_and_group() {
    let res = expect_error("Start[iri].And(HasType[A].Eval");

    insta::assert_snapshot!(res, @"Delimiter: unterminated `And(` group, expected `)` in `And(HasType[A].Eval`");
}

#[test]
fn stray_close_paren() {
    let res = expect_error("Start[iri].HasType[A]).Eval");

    insta::assert_snapshot!(res, @"Delimiter: unexpected `)` in `HasType[A])`");
}

#[test]
fn extra_close_paren_after_group() {
    let res = expect_error("Start[iri].Or(HasType[A])).Eval");

    insta::assert_snapshot!(res, @"Delimiter: unexpected `)` in `)`");
}

#[test]
fn close_paren_after_group_tail() {
    let res = expect_error("Start[iri].Or(HasType[A]).HasType[B]).Eval");

    insta::assert_snapshot!(res, @"Delimiter: unexpected `)` in `HasType[B])`");
}

#[test]
fn text_glued_to_group() {
    let res = expect_error("Start[iri].Or(HasType[A])HasType[B].Eval");

    insta::assert_snapshot!(res, @"Delimiter: unexpected `HasType[B]` after `Or(HasType[A])`");
}

#[test]
fn group_on_other_keyword() {
    let res = expect_error("Start[iri].Not(HasType[A]).Eval");

    insta::assert_snapshot!(res, @"Delimiter: unexpected `(` after `Not`, only `Or(...)` opens a group");
}

#[test]
fn or_with_argument_list() {
    let res = expect_error("Start[iri].Or[A].Eval");

    insta::assert_snapshot!(res, @"Delimiter: expected `Or(...)`, got `Or[A]`");
}

#[test]
fn empty_or_group() {
    let res = expect_error("Start[iri].Or().Eval");

    insta::assert_snapshot!(res, @"Arity: empty group `Or()`");
}

#[test]
fn or_group_of_empty_steps() {
    let res = expect_error("Start[iri].Or(..).Eval");

    insta::assert_snapshot!(res, @"Arity: empty group `Or(..)`");
}

#[test]
fn has_broader_one_argument() {
    let res = expect_error("Start[iri].HasBroader[tax].Eval");

    insta::assert_snapshot!(res, @"Arity: `HasBroader` takes exactly 2 arguments, got 1 in `HasBroader[tax]`");
}

#[test]
fn has_broader_three_arguments() {
    let res = expect_error("Start[iri].HasBroader[tax, a, b].Eval");

    insta::assert_snapshot!(res, @"Arity: `HasBroader` takes exactly 2 arguments, got 3 in `HasBroader[tax,a,b]`");
}

#[test]
fn has_value_without_values() {
    let res = expect_error("Start[iri].HasValue[color].Eval");

    insta::assert_snapshot!(res, @"Arity: `HasValue` takes at least 2 arguments, got 1 in `HasValue[color]`");
}

#[test]
fn has_type_without_argument() {
    let res = expect_error("Start[iri].HasType[].Eval");

    insta::assert_snapshot!(res, @"Arity: `HasType` takes exactly 1 argument, got 0 in `HasType[]`");
}

#[test]
fn has_type_two_arguments() {
    let res = expect_error("Start[iri].HasType[A, B].Eval");

    insta::assert_snapshot!(res, @"Arity: `HasType` takes exactly 1 argument, got 2 in `HasType[A,B]`");
}

#[test]
fn is_active_with_argument() {
    let res = expect_error("Start[iri].IsActive[x].Eval");

    insta::assert_snapshot!(res, @"Arity: `IsActive` takes no arguments, got 1 in `IsActive[x]`");
}

#[test]
fn empty_argument() {
    let res = expect_error("Start[iri].HasValue[f,,x].Eval");

    insta::assert_snapshot!(res, @"Arity: empty argument in `HasValue[f,,x]`");
}

#[test]
fn error_inside_group_aborts_parse() {
    let res = expect_error("Start[iri].Or(HasType[A].Bogus[x]).HasType[B].Eval");

    insta::assert_snapshot!(res, @"UnknownKeyword: unknown step `Bogus` in `Bogus[x]`");
}

#[test]
fn has_category_is_not_a_step() {
    let res = expect_error("Start[iri].HasCategory[cat].Eval");

    insta::assert_snapshot!(res, @"UnknownKeyword: unknown step `HasCategory` in `HasCategory[cat]`");
}
