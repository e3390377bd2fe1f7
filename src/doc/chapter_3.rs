/*!
# The Machine

## Canvas
The canvas is a rectangle of pixels. Row 0 is the bottom row and `up`
moves toward higher rows. The cursor starts on the bottom left pixel
every time a program is run.

The command line reads canvases as text, top row first, one letter per
pixel.

| Letter | Color |
|--------|-------|
| `.` or `w` | white |
| `#` or `k` | black |
| `r` `g` `b` | red, green, blue |
| `c` `m` `y` | cyan, magenta, yellow |

## Execution
Each instruction reads the pixel under the cursor. A white pixel selects
the white action and any other color selects the color action. The action
then writes, moves, and jumps, in that order. If the move would leave the
canvas the program ends with exit status 2 and the cursor stays where it
was. Exit status 2 is otherwise an ordinary status; `exit 2` is allowed.

Execution is run in slices. The host asks for up to some number of
instructions at a time and may stop early at a breakpoint. The `run`
command paces slices to an instruction rate, 5 instructions per second by
default. `--turbo` multiplies that rate.

## Optimization
Before a program runs, chains of instructions that neither move nor exit
are folded into the instruction they end on. This does not change what a
program does, only how many instructions it takes.

```text
write black goto paint
paint: if color right else left
```

Here the first line always arrives at `paint` on a black pixel, so it is
compiled as `write black right`.

A chain that never moves would run forever. The palette dialect leaves it
in place. The binary dialect refuses to compile it:

```text
Line 1: found infinite loop without moving
```

`--strict` and `--permissive` override the dialect. `--no-optimize`
skips folding entirely, which is useful with the debugger.

## Grading
`tmlx check` runs a program against unit tests. Each test is an input
canvas, an optional expected output canvas and the expected exit status.
Tests run in order and the first failure stops the run. When every test
passes, branch coverage over all tests is reported, and with `--solution`
the program earns 0 to 3 stars by its length compared with the solution.

*/
