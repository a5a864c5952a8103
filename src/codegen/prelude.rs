//! C++ support code prepended to every generated translation unit.

/// The runtime prelude: the variadic `reveal` printer family and the
/// `inquire` line-reading intrinsic. Arguments to `reveal` are printed
/// space separated and newline terminated; with no arguments it prints the
/// newline alone. Booleans print as `true`/`false` instead of `1`/`0`.
pub const CPP_PRELUDE: &str = r#"#include <iostream>
#include <string>
#include <vector>
#include <sstream>
#include <limits>

using namespace std;

void reveal_value(bool value) { cout << (value ? "true" : "false"); }

template <typename T>
void reveal_value(const T& value) { cout << value; }

void reveal() { cout << "\n"; }

template <typename T>
void reveal(const T& value) {
    reveal_value(value);
    cout << "\n";
}

template <typename T, typename... Rest>
void reveal(const T& first, const Rest&... rest) {
    reveal_value(first);
    cout << " ";
    reveal(rest...);
}

string inquire() {
    string line;
    getline(cin, line);
    return line;
}
"#;
