/*!
# Programs

## Lines
A program is plain text. Each line of text is one line of the program,
numbered from 1. Lines run from top to bottom unless an instruction says
otherwise. Running past the last line is the same as `exit 0`.

A line holds at most one instruction. Words are separated by spaces or
tabs. Anything left over after a complete instruction is an error.

```text
right right
```
```text
Line 1, word 2: 'right' should be on the next line
```

## Labels
A word followed by a colon at the start of a line names that line.
`goto` uses the name. Labels are unique, and may not be any of the
words the language uses for itself.

```text
top: write black up goto top
```

A line with only a label, or no instruction at all, is a placeholder.
It does nothing and is removed when the program is compiled; jumps to it
go wherever it would have led. The binary dialect does not allow
placeholders, see [Appendix B](../___Appendix_B/index.html).

## Comments
`//` comments out the rest of the line. `/*` starts a block comment that
runs until the next `*/`, on this line or a later one. A block comment
that never ends is an error reported on the line where it began.

```text
right // keep going
/* this whole
   paragraph is ignored */ exit 1
```

*/
