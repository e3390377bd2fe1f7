/*!
# Dialects

Two dialects share the compiler and the machine. Select one with
`--dialect`. The palette dialect is the default.

| | Palette | Binary |
|-|---------|--------|
| Colors | white black red green blue cyan magenta yellow | white black |
| Conditions | `white`, `color` | `white`, `black` |
| Directions | `up` `down` `left` `right` | `move N` `move E` `move S` `move W`, or `north` `east` `south` `west` |
| `while` | yes | no |
| Placeholder lines | allowed | error |
| Action without `write` | leaves the pixel | rewrites the pixel with its own color |
| Non-moving loops | left in place | compile error |

In both dialects `0` may be written for white and `1` for black.

## Reserved words

Palette:
```text
: black blue color cyan down else exit goto green if left magenta nowhere
red repeat right up while white write yellow
```

Binary:
```text
: E N S W black down east else exit goto if left move north repeat right
south up west while white write
```

*/
